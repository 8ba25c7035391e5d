#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use crate::buffer::{RandomBuffer, Word};
    use crate::sequence::{
        APPEND_VALUE, Container, Element, LargeRecord, OrderedMultiSet, append_constant, append_then_sort, merge_sort,
        naive_sorted_insert, prepend_constant, sequence_throughput, sorted_insert,
    };

    const SCENARIO: [Word; 5] = [5, 3, 4, 1, 2];

    fn keys<T: Element>(values: &[T]) -> Vec<Word> {
        values.iter().map(T::key).collect()
    }

    fn is_sorted<T: Ord>(values: &[T]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    fn sorted_words(input: &[Word]) -> Vec<Word> {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        expected
    }

    #[test]
    fn test_scenario_naive_and_binary_insert_agree() {
        let expected = vec![1, 2, 3, 4, 5];
        assert_eq!(naive_sorted_insert::<Vec<Word>, Word>(&SCENARIO), expected);
        assert_eq!(sorted_insert::<Vec<Word>, Word>(&SCENARIO), expected);
        assert_eq!(
            naive_sorted_insert::<LinkedList<Word>, Word>(&SCENARIO).to_vec(),
            expected
        );
        assert_eq!(naive_sorted_insert::<VecDeque<Word>, Word>(&SCENARIO).to_vec(), expected);
        assert_eq!(sorted_insert::<VecDeque<Word>, Word>(&SCENARIO).to_vec(), expected);
        assert_eq!(sorted_insert::<OrderedMultiSet<Word>, Word>(&SCENARIO).to_vec(), expected);
    }

    fn check_sorted_inserts<T: Element>(input: &[Word]) {
        let expected = sorted_words(input);
        let results: Vec<(&str, Vec<T>)> = vec![
            ("naive/vec", naive_sorted_insert::<Vec<T>, T>(input).to_vec()),
            ("naive/list", naive_sorted_insert::<LinkedList<T>, T>(input).to_vec()),
            ("naive/deque", naive_sorted_insert::<VecDeque<T>, T>(input).to_vec()),
            ("binary/vec", sorted_insert::<Vec<T>, T>(input).to_vec()),
            ("binary/deque", sorted_insert::<VecDeque<T>, T>(input).to_vec()),
            ("binary/multiset", sorted_insert::<OrderedMultiSet<T>, T>(input).to_vec()),
        ];
        for (name, values) in results {
            assert_eq!(values.len(), input.len(), "{} lost elements", name);
            assert!(is_sorted(&values), "{} is not sorted", name);
            assert_eq!(keys(&values), expected, "{} is not a permutation", name);
        }
    }

    #[test]
    fn test_sorted_inserts_on_random_input() {
        let buffer = RandomBuffer::generate(300, Some(11));
        check_sorted_inserts::<Word>(buffer.as_slice());
        check_sorted_inserts::<LargeRecord>(buffer.as_slice());
    }

    #[test]
    fn test_sorted_inserts_keep_duplicates() {
        let input = [4, 1, 4, 4, 0, 1, -3, 4];
        check_sorted_inserts::<Word>(&input);
        check_sorted_inserts::<LargeRecord>(&input);
    }

    fn check_append_then_sort<T: Element>(input: &[Word]) {
        let expected = sorted_words(input);
        assert_eq!(keys(&append_then_sort::<Vec<T>, T>(input)), expected);
        assert_eq!(keys(&append_then_sort::<VecDeque<T>, T>(input).to_vec()), expected);
        assert_eq!(keys(&append_then_sort::<LinkedList<T>, T>(input).to_vec()), expected);
    }

    #[test]
    fn test_append_then_sort_is_sorted_permutation() {
        let buffer = RandomBuffer::generate(1000, Some(5));
        check_append_then_sort::<Word>(buffer.as_slice());
        check_append_then_sort::<LargeRecord>(buffer.as_slice());
        check_append_then_sort::<Word>(&[]);
        check_append_then_sort::<Word>(&[42]);
    }

    #[test]
    fn test_list_merge_sort_is_stable() {
        // Pairs compared by key only; the tag records the original position.
        #[derive(Debug, Clone, Copy)]
        struct Tagged(i32, usize);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let keys = [3, 1, 3, 2, 1, 3, 2, 1];
        let mut list: LinkedList<Tagged> = keys.iter().enumerate().map(|(i, &k)| Tagged(k, i)).collect();
        merge_sort(&mut list);
        let sorted: Vec<(i32, usize)> = list.iter().map(|t| (t.0, t.1)).collect();
        assert_eq!(
            sorted,
            vec![(1, 1), (1, 4), (1, 7), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)]
        );
    }

    #[test]
    fn test_multiset_keeps_equal_elements_in_insertion_order() {
        let mut set = OrderedMultiSet::default();
        for v in [2, 1, 2, 2] {
            set.insert(v);
        }
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_append_and_prepend_constant() {
        let v: Vec<Word> = append_constant::<Vec<Word>, Word>(7);
        assert_eq!(v, vec![APPEND_VALUE; 7]);
        let l: LinkedList<LargeRecord> = prepend_constant::<LinkedList<LargeRecord>, LargeRecord>(3);
        assert_eq!(l.len(), 3);
        assert!(l.iter().all(|r| r.key() == APPEND_VALUE));
        let d: VecDeque<Word> = prepend_constant::<VecDeque<Word>, Word>(0);
        assert!(d.is_empty());
        let v: Vec<LargeRecord> = prepend_constant::<Vec<LargeRecord>, LargeRecord>(4);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_large_record_orders_by_first_word() {
        let a = LargeRecord::new(3);
        let mut b = LargeRecord::new(3);
        assert_eq!(a, b);
        assert!(LargeRecord::new(-1) < a);
        b = LargeRecord::from(4);
        assert!(a < b);
        assert_eq!(&a.words()[1..], &[0; 15]);
        assert_eq!(LargeRecord::width(), 64);
        assert_eq!(<Word as Element>::width(), 4);
    }

    #[test]
    fn test_sequence_throughput_uses_element_width() {
        let small = sequence_throughput::<Word>(100, 3);
        assert_eq!((small.items, small.bytes), (300, 1200));
        let large = sequence_throughput::<LargeRecord>(100, 3);
        assert_eq!((large.items, large.bytes), (300, 300 * 64));
    }
}
