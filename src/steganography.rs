use crate::constants::{BITS_PER_CHAR, DELIMITER, MAX_CHAR_CODE};
use crate::error::CodecError;

pub fn capacity(buffer: &[u8]) -> usize {
    buffer.len()
}

pub fn encode(buffer: &[u8], message: &str) -> Result<Vec<u8>, CodecError> {
    if message.is_empty() || buffer.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let bits = pack_message(message)?;
    let available = capacity(buffer);

    if bits.len() > available {
        return Err(CodecError::CapacityExceeded {
            required: bits.len(),
            available,
            max_chars: available / BITS_PER_CHAR,
        });
    }

    let mut stego = buffer.to_vec();
    stego.iter_mut().zip(bits).for_each(|(slot, bit)| {
        *slot = (*slot & 0xFE) | bit;
    });

    Ok(stego)
}

pub fn decode(buffer: &[u8]) -> Result<String, CodecError> {
    let bits: Vec<u8> = buffer.iter().map(|value| value & 1).collect();

    let marker = bits
        .windows(DELIMITER.len())
        .position(|window| window == DELIMITER.as_slice())
        .ok_or(CodecError::NoMessageFound)?;

    let payload = &bits[..marker];
    if payload.len() % BITS_PER_CHAR != 0 {
        return Err(CodecError::MalformedPayload {
            bit_count: payload.len(),
        });
    }

    Ok(payload
        .chunks_exact(BITS_PER_CHAR)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .map(char::from)
        .collect())
}

fn pack_message(message: &str) -> Result<Vec<u8>, CodecError> {
    let mut bits = Vec::with_capacity(message.chars().count() * BITS_PER_CHAR + DELIMITER.len());

    for character in message.chars() {
        let code = u32::from(character);
        if code > MAX_CHAR_CODE {
            return Err(CodecError::UnsupportedCharacter(character));
        }
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }

    bits.extend_from_slice(&DELIMITER);
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 构造一个带有确定性噪声的测试缓冲区
    fn noisy_buffer(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 37 % 256) as u8).collect()
    }

    /// 验证编码后再解码能还原原始消息
    #[test]
    fn roundtrip_recovers_message() {
        let buffer = noisy_buffer(1000);
        let stego = encode(&buffer, "HI").unwrap();
        assert_eq!(decode(&stego).unwrap(), "HI");
    }

    /// 验证 0-255 全范围字符 (含重音字符与控制字符) 的往返
    #[test]
    fn roundtrip_covers_full_latin1_range() {
        let message: String = "café \u{0001}\u{00FF} ñ~".to_string();
        let buffer = noisy_buffer(message.chars().count() * 8 + 16);
        let stego = encode(&buffer, &message).unwrap();
        assert_eq!(decode(&stego).unwrap(), message);
    }

    /// 验证比特流长度恰好等于容量时编码成功，少一个槽位则失败
    #[test]
    fn capacity_boundary_is_exact() {
        let message = "AB";
        let needed = message.len() * 8 + 16;

        let exact = noisy_buffer(needed);
        let stego = encode(&exact, message).unwrap();
        assert_eq!(decode(&stego).unwrap(), message);

        let short = noisy_buffer(needed - 1);
        let result = encode(&short, message);
        assert!(matches!(result, Err(CodecError::CapacityExceeded { .. })));
    }

    /// 验证容量不足时报告的最大字符数遵循 容量/8 的约定
    #[test]
    fn capacity_error_reports_max_chars() {
        let buffer = noisy_buffer(20);
        let result = encode(&buffer, "HELLO");
        assert_eq!(
            result,
            Err(CodecError::CapacityExceeded {
                required: 56,
                available: 20,
                max_chars: 2,
            })
        );
    }

    /// 验证比特流之后的槽位保持原样，且被修改的槽位只有最低位变化
    #[test]
    fn encode_only_touches_payload_lsbs() {
        let buffer = noisy_buffer(500);
        let message = "pixel";
        let stego = encode(&buffer, message).unwrap();
        let bitstream_len = message.len() * 8 + 16;

        assert_eq!(stego.len(), buffer.len());
        assert_eq!(stego[bitstream_len..], buffer[bitstream_len..]);
        for (before, after) in buffer.iter().zip(&stego) {
            assert!(before ^ after <= 1, "only the LSB may change");
        }
    }

    /// 验证编码不会改动调用者的原始缓冲区
    #[test]
    fn encode_leaves_input_untouched() {
        let buffer = noisy_buffer(200);
        let snapshot = buffer.clone();
        encode(&buffer, "X").unwrap();
        assert_eq!(buffer, snapshot);
    }

    /// 验证空消息与空缓冲区都会被拒绝
    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(encode(&noisy_buffer(100), ""), Err(CodecError::EmptyInput));
        assert_eq!(encode(&[], "HI"), Err(CodecError::EmptyInput));
    }

    /// 验证码点超过 255 的字符会被显式拒绝
    #[test]
    fn wide_characters_are_rejected() {
        let result = encode(&noisy_buffer(100), "好");
        assert_eq!(result, Err(CodecError::UnsupportedCharacter('好')));
    }

    /// 验证不含分隔符的缓冲区解码失败
    #[test]
    fn missing_delimiter_is_detected() {
        let buffer = vec![0u8; 100];
        assert_eq!(decode(&buffer), Err(CodecError::NoMessageFound));
    }

    /// 验证分隔符之前比特数不是 8 的倍数时解码失败
    #[test]
    fn misaligned_delimiter_is_rejected() {
        let mut bits = vec![1, 0, 1, 0];
        bits.extend_from_slice(&DELIMITER);
        let buffer: Vec<u8> = bits.iter().map(|&bit| 0xA0 | bit).collect();
        assert_eq!(
            decode(&buffer),
            Err(CodecError::MalformedPayload { bit_count: 4 })
        );
    }

    /// 验证分隔符出现在起始位置时解码得到空消息
    #[test]
    fn delimiter_at_start_yields_empty_message() {
        let buffer: Vec<u8> = DELIMITER.iter().map(|&bit| 0x40 | bit).collect();
        assert_eq!(decode(&buffer).unwrap(), "");
    }

    /// 验证对同一缓冲区重复解码得到相同结果
    #[test]
    fn decode_is_idempotent() {
        let buffer = noisy_buffer(400);
        let stego = encode(&buffer, "again").unwrap();
        assert_eq!(decode(&stego).unwrap(), decode(&stego).unwrap());
    }

    /// 验证容量函数等于缓冲区长度
    #[test]
    fn capacity_equals_buffer_length() {
        assert_eq!(capacity(&[]), 0);
        assert_eq!(capacity(&noisy_buffer(1000)), 1000);
    }
}
