#![no_main]
use libfuzzer_sys::fuzz_target;
use texweave_markup::{Markup, Matrix, MatrixType};

fuzz_target!(|data: &[u8]| {
    // First byte picks the column count, the rest become elements.
    // Arbitrary shapes must either be rejected or render without panicking.
    let Some((&cols, rest)) = data.split_first() else {
        return;
    };
    let cols = usize::from(cols % 8);
    let rows: Vec<Vec<i16>> = if cols == 0 {
        vec![Vec::new()]
    } else {
        rest.chunks(cols)
            .map(|chunk| chunk.iter().map(|&b| i16::from(b as i8)).collect())
            .collect()
    };

    if let Ok(matrix) = Matrix::new(rows) {
        let (r, c) = matrix.shape();
        let out = matrix.with_type(MatrixType::Vert).dumps();
        assert_eq!(out.matches("\\\\").count(), r - 1);
        assert!(out.lines().skip(1).take(r).all(|line| line.matches('&').count() == c - 1));
    }
});
