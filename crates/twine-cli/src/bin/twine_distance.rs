// twine-distance: Print the edit distance between two strings.
//
// Usage:
//   twine-distance A B

fn main() {
    twine_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if twine_cli::wants_help(&args) {
        println!("twine-distance: Print the edit distance between two strings.");
        println!();
        println!("Usage: twine-distance A B");
        println!();
        println!("Distance counts single-character insertions, deletions and");
        println!("substitutions over Unicode code points.");
        return;
    }

    let [a, b] = args.as_slice() else {
        twine_cli::fatal("expected exactly two arguments");
    };
    println!("{}", twine_core::edit_distance(a, b));
}
