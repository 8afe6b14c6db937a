use assay_core::numeric::clamp01;

/// Map a continuous 0–1 metric onto the 0–5 display scale.
///
/// | input        | bin |
/// |--------------|-----|
/// | 0            | 0   |
/// | (0, .10)     | 1   |
/// | [.10, .25)   | 2   |
/// | [.25, .50)   | 3   |
/// | [.50, .75)   | 4   |
/// | [.75, 1]     | 5   |
///
/// Display only. The continuous value is always reported next to it.
pub fn discretize_0_5(x: f64) -> u8 {
    let x = clamp01(x);
    if x <= 0.0 {
        0
    } else if x < 0.10 {
        1
    } else if x < 0.25 {
        2
    } else if x < 0.50 {
        3
    } else if x < 0.75 {
        4
    } else {
        5
    }
}
