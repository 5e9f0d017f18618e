#![no_main]

use hermite_curve_engine::solve_tridiagonal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Bytes in vier gleich lange f32-Bänder zerlegen
    let floats: Vec<f32> = data
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let n = floats.len() / 4;
    let (a, rest) = floats.split_at(n);
    let (b, rest) = rest.split_at(n);
    let (c, rest) = rest.split_at(n);
    let d = &rest[..n];

    // Darf nie paniken — degenerierte Systeme liefern Inf/NaN oder Err
    if let Ok(x) = solve_tridiagonal(a, b, c, d) {
        assert_eq!(x.len(), n);
    }
});
