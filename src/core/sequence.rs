pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// 逐一乘以二，產生等長的新序列，輸入不變
///
/// 超出 `i64` 範圍時以二補數環繞，debug 與 release 行為一致。
pub fn double_all(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|n| n.wrapping_mul(2)).collect()
}

pub fn doubled() -> Vec<i64> {
    let result = double_all(&NUMBERS);
    tracing::debug!("Doubled {:?} -> {:?}", NUMBERS, result);
    result
}
