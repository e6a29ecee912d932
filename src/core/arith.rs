use std::ops::Add;

/// 回傳兩數之和，溢位與精度行為沿用型別本身的 `+`
pub fn add<T: Add<Output = T>>(x: T, y: T) -> T {
    x + y
}
