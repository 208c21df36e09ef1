//! Key sequences used to build trees of known shape: sequential keys build degenerate
//! chains, seeded random keys build trees of logarithmic expected height
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::BinarySearchTree;

    #[test]
    fn sequential_keys_build_chains() {
        for order in vec![SequentialOrder::Ascending, SequentialOrder::Descending] {
            let tree: BinarySearchTree<u64> = SequentialKeys::new(100, order).collect();
            assert_eq!(tree.len(), 100);
            assert_eq!(tree.height(), Some(99));
            assert!(!tree.is_balanced());
            assert_eq!(tree.find_second_highest(), Some(&98));
        }
    }

    #[test]
    fn random_keys_build_shallow_trees() {
        let keys: Vec<u64> = RandomKeys::new(1000, 1_000_000, 17).collect();
        let tree: BinarySearchTree<u64> = keys.iter().cloned().collect();
        assert_eq!(tree.len(), 1000);
        // The expected height of a random tree is about 3 * ln(n)
        assert!(tree.height().unwrap() < 60);
        for key in &keys {
            assert!(tree.contains(key));
        }
    }

    #[test]
    fn float_keys() {
        let mut tree: BinarySearchTree<_> = RandomFloatKeys::new(500, 3).collect();
        let sorted: Vec<f64> = tree.dfs_in_order().into_iter().map(|x| x.into_inner()).collect();
        assert_eq!(sorted.len(), 500);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let max = *tree.max().unwrap();
        assert_eq!(tree.remove(&max), Some(max));
        assert_eq!(tree.max().map(|x| x.into_inner()), Some(sorted[498]));
    }
}
