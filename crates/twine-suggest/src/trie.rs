// Prefix tree mapping string keys to lists of values.
//
// Not used by the suggestion engine; kept as a standalone lookup structure.

use hashbrown::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("key not found: {0:?}")]
    NotFound(String),
}

#[derive(Debug)]
struct Node<V> {
    children: HashMap<char, Node<V>>,
    values: Vec<V>,
    /// Number of stored values whose key passes through this node.
    prefixes: usize,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            values: Vec::new(),
            prefixes: 0,
        }
    }

    fn is_end(&self) -> bool {
        !self.values.is_empty()
    }
}

/// A character trie storing any number of values per key.
#[derive(Debug)]
pub struct Trie<V> {
    root: Node<V>,
    keys: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            keys: 0,
        }
    }

    /// Append `value` to the values stored at `key`.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
            node.prefixes += 1;
        }
        if !node.is_end() {
            self.keys += 1;
        }
        node.values.push(value);
    }

    /// All values stored at exactly `key`, in insertion order.
    pub fn get(&self, key: &str) -> Result<&[V], TrieError> {
        self.find(key)
            .filter(|node| node.is_end())
            .map(|node| node.values.as_slice())
            .ok_or_else(|| TrieError::NotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Remove `key` together with all of its values.
    ///
    /// Prefix counts along the path drop by the number of removed values;
    /// nodes whose count reaches zero are pruned.
    pub fn delete(&mut self, key: &str) -> Result<(), TrieError> {
        let removed = self.get(key)?.len();
        let path: Vec<char> = key.chars().collect();
        remove_path(&mut self.root, &path, removed);
        self.keys -= 1;
        Ok(())
    }

    /// Number of keys that currently hold values.
    pub fn len(&self) -> usize {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Number of stored values whose key starts with `prefix`.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        if prefix.is_empty() {
            return self.root.values.len()
                + self.root.children.values().map(|n| n.prefixes).sum::<usize>();
        }
        self.find(prefix).map_or(0, |node| node.prefixes)
    }

    fn find(&self, key: &str) -> Option<&Node<V>> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

fn remove_path<V>(node: &mut Node<V>, path: &[char], removed: usize) {
    let Some((&c, rest)) = path.split_first() else {
        node.values.clear();
        return;
    };
    let prune = match node.children.get_mut(&c) {
        Some(child) => {
            child.prefixes -= removed;
            if child.prefixes == 0 {
                true
            } else {
                remove_path(child, rest, removed);
                false
            }
        }
        None => false,
    };
    if prune {
        node.children.remove(&c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trie_is_empty() {
        let trie: Trie<u32> = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.get("abc"), Err(TrieError::NotFound("abc".into())));
    }

    #[test]
    fn get_returns_values_in_order() {
        let mut trie = Trie::new();
        trie.insert("abc", "2");
        trie.insert("abc", "123");
        assert_eq!(trie.get("abc").unwrap(), &["2", "123"]);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn prefix_of_a_key_is_not_a_key() {
        let mut trie = Trie::new();
        trie.insert("abc", 1);
        assert!(trie.get("ab").is_err());
        assert!(trie.get("abcd").is_err());
        assert!(trie.contains_key("abc"));
    }

    #[test]
    fn delete_removes_all_values() {
        let mut trie = Trie::new();
        trie.insert("abc", 2);
        trie.insert("abc", 123);
        trie.delete("abc").unwrap();
        assert!(trie.get("abc").is_err());
        assert!(trie.is_empty());
        assert_eq!(trie.prefix_count("a"), 0);
        assert!(trie.root.children.is_empty());
    }

    #[test]
    fn delete_keeps_shared_prefixes() {
        let mut trie = Trie::new();
        trie.insert("abc", 1);
        trie.insert("abd", 2);
        trie.insert("ab", 3);
        assert_eq!(trie.prefix_count("ab"), 3);

        trie.delete("abc").unwrap();
        assert_eq!(trie.prefix_count("ab"), 2);
        assert_eq!(trie.get("abd").unwrap(), &[2]);
        assert_eq!(trie.get("ab").unwrap(), &[3]);
        assert_eq!(trie.prefix_count("abc"), 0);

        trie.delete("ab").unwrap();
        assert_eq!(trie.prefix_count("ab"), 1);
        assert_eq!(trie.get("abd").unwrap(), &[2]);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn delete_missing_key_fails() {
        let mut trie = Trie::new();
        trie.insert("abc", 1);
        assert_eq!(trie.delete("ab"), Err(TrieError::NotFound("ab".into())));
        assert_eq!(trie.delete("xyz"), Err(TrieError::NotFound("xyz".into())));
        assert_eq!(trie.get("abc").unwrap(), &[1]);
    }

    #[test]
    fn unicode_keys() {
        let mut trie = Trie::new();
        trie.insert("fran\u{00E7}ais", 'f');
        trie.insert("fran\u{00E7}", 'g');
        assert_eq!(trie.get("fran\u{00E7}ais").unwrap(), &['f']);
        assert_eq!(trie.prefix_count("fran"), 2);
    }

    #[test]
    fn empty_key_lives_at_root() {
        let mut trie = Trie::new();
        trie.insert("", 7);
        trie.insert("a", 8);
        assert_eq!(trie.get("").unwrap(), &[7]);
        assert_eq!(trie.prefix_count(""), 2);
        trie.delete("").unwrap();
        assert!(trie.get("").is_err());
        assert_eq!(trie.get("a").unwrap(), &[8]);
    }
}
