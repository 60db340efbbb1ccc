use rand::Rng;
use rand::distr::Alphanumeric;

/// 生成指定长度的随机字母数字串
pub fn generate_random_code(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
