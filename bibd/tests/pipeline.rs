use std::fs;

use bibd::{
    augment, classify_basis, enumerate, io, row_basis, validate_by_definition,
    validate_by_identity, DesignCode, Error, Matrix, MAX_ENUMERABLE_RANK,
};

const FANO: &str = "7 3 1
1 1 1 0 0 0 0
1 0 0 1 1 0 0
1 0 0 0 0 1 1
0 1 0 1 0 1 0
0 1 0 0 1 0 1
0 0 1 1 0 0 1
0 0 1 0 1 1 0
";

#[test]
fn fano_plane_end_to_end() {
    let (params, m) = io::read_design(FANO.as_bytes()).unwrap();
    assert_eq!((params.r, params.b), (3, 7));
    assert!(validate_by_definition(&m));
    assert!(validate_by_identity(&m));

    // r = 3 is odd, so an all-ones column is appended
    let matrix = augment(&m, &params);
    assert_eq!(matrix.cols(), params.b + 1);

    let basis = row_basis(&matrix);
    assert!(basis.rows() <= 7);
    assert_eq!(basis.rows(), 4);

    let words: Vec<_> = enumerate(&basis).unwrap().collect();
    assert_eq!(words.len(), 1 << basis.rows());
    assert!(words.iter().all(|w| w.len() == params.b + 1));

    let classes = classify_basis(&basis, MAX_ENUMERABLE_RANK).unwrap();
    assert_eq!(classes.len(), 8);
    // every codeword of weight 4 or 8 lands in 4 or 8 buckets
    assert_eq!(classes.total_entries(), 14 * 4 + 8);
    // the appended coordinate is set on exactly half of the codewords
    assert_eq!(classes.bucket(7).len(), 8);

    let code = DesignCode::from_basis(basis).unwrap();
    assert_eq!(code.n_k_d_q(), [8, 4, 4, 2]);

    let dir = std::env::temp_dir().join(format!("bibd-pipeline-test-{}", std::process::id()));
    let paths = io::write_classification(&dir, &classes).unwrap();
    assert_eq!(paths.len(), 8);
    let last = fs::read_to_string(dir.join("file8.txt")).unwrap();
    assert_eq!(last.lines().count(), 8);
    assert!(last.lines().all(|l| l.len() == 8 && l.ends_with('1')));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_design_stops_early() {
    // right shape for (7, 3, 1), but the first two points share every block they are in
    let input = "7 3 1
1 1 1 0 0 0 0
1 1 1 0 0 0 0
0 0 0 1 1 1 0
0 0 0 1 1 1 0
1 0 0 1 0 0 1
0 1 0 0 1 0 1
0 0 1 0 0 1 1
";
    let (params, m) = io::read_design(input.as_bytes()).unwrap();
    assert!(!validate_by_definition(&m));
    assert!(!validate_by_identity(&m));
    assert!(matches!(
        params.check_against(&m),
        Err(Error::ParameterMismatch(_))
    ));
}

#[test]
fn oversized_basis_is_refused() {
    let basis = Matrix::identity(MAX_ENUMERABLE_RANK + 1);
    assert!(matches!(
        classify_basis(&basis, MAX_ENUMERABLE_RANK),
        Err(Error::RankTooLarge { .. })
    ));
}
