/// 标记隐藏信息结束的 16 位分隔符比特序列。
/// 编码时追加在消息比特流末尾；解码时在提取出的比特序列中
/// 查找它的首次出现位置，其之前的部分即为有效载荷。
pub const DELIMITER: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// 每个字符打包后占用的比特数。
/// 每个字符按其码点值以 `u8` (8 bits) 处理，高位在前。
pub const BITS_PER_CHAR: usize = 8;

/// 可打包字符的最大码点值。
/// 超过 8 bits 表示范围的字符无法无损嵌入，编码时将被拒绝。
pub const MAX_CHAR_CODE: u32 = 0xFF;
