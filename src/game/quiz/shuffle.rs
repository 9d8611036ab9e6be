use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items` (Fisher-Yates).
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Clone + Ord>(items: &[T]) -> Vec<T> {
        let mut items = items.to_vec();
        items.sort();
        items
    }

    #[test]
    fn is_a_permutation() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        for _ in 0..50 {
            let shuffled = shuffle(&items);
            assert_eq!(sorted(&shuffled), sorted(&items));
        }
    }

    #[test]
    fn does_not_mutate_input() {
        let items = vec!["a", "b", "c", "d"];
        let _ = shuffle(&items);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn handles_trivial_inputs() {
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[7]), vec![7]);
    }

    #[test]
    fn reaches_every_position() {
        let items = vec![0, 1, 2];
        let mut seen_first = [false; 3];
        for _ in 0..500 {
            seen_first[shuffle(&items)[0]] = true;
        }
        assert!(seen_first.iter().all(|seen| *seen));
    }
}
