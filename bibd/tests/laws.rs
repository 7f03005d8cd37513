use bibd::{
    classify_basis, enumerate, row_basis, validate_by_definition, validate_by_identity, Matrix,
    MAX_ENUMERABLE_RANK,
};
use proptest::prelude::*;

/// Arbitrary 0/1 matrices with up to `max` rows and columns
fn binary_matrix(max: usize) -> impl Strategy<Value = Matrix> {
    (0..=max, 0..=max).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0i64..=1, cols), rows)
            .prop_map(move |data| Matrix::build(rows, cols, |i, j| data[i][j]))
    })
}

proptest! {
    #[test]
    fn validators_agree(m in binary_matrix(7)) {
        prop_assert_eq!(validate_by_definition(&m), validate_by_identity(&m));
    }

    #[test]
    fn square_validators_agree(n in 0usize..8, seed in any::<u64>()) {
        use rand::{rngs::SmallRng, SeedableRng};
        let mut rng = SmallRng::seed_from_u64(seed);
        let m = Matrix::random(&mut rng, n, n);
        prop_assert_eq!(validate_by_definition(&m), validate_by_identity(&m));
    }

    #[test]
    fn transpose_is_an_involution(m in binary_matrix(9)) {
        prop_assert_eq!(m.transposed().transposed(), m);
    }

    #[test]
    fn basis_rank_is_stable(m in binary_matrix(9)) {
        let basis = row_basis(&m);
        prop_assert_eq!(basis.rows(), m.rank());
        prop_assert_eq!(basis.cols(), m.cols());
        prop_assert_eq!(row_basis(&basis.transposed()).rows(), m.rank());
    }

    #[test]
    fn basis_rows_come_from_the_input(m in binary_matrix(9)) {
        let basis = row_basis(&m);
        for i in 0..basis.rows() {
            prop_assert!((0..m.rows()).any(|j| m.row(j) == basis.row(i)));
        }
    }

    #[test]
    fn enumeration_size(m in binary_matrix(8)) {
        let basis = row_basis(&m);
        let words: Vec<_> = enumerate(&basis).unwrap().collect();
        prop_assert_eq!(words.len(), 1usize << basis.rows());
        prop_assert!(words[0].is_zero());
        prop_assert!(words.iter().all(|w| w.len() == m.cols()));
    }

    #[test]
    fn bucket_totals_count_set_positions(m in binary_matrix(8)) {
        let basis = row_basis(&m);
        let set_positions: usize = enumerate(&basis)
            .unwrap()
            .map(|w| w.to_binary_string().chars().filter(|&c| c == '1').count())
            .sum();
        let classes = classify_basis(&basis, MAX_ENUMERABLE_RANK).unwrap();
        prop_assert_eq!(classes.len(), m.cols());
        prop_assert_eq!(classes.total_entries(), set_positions);
    }
}
