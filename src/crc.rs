/// Computes the 16 bit CRC used by the station console (CCITT polynomial, zero init,
/// processed a byte at a time on split msb/lsb accumulators).
///
/// A frame followed by its own CRC in big-endian order yields zero, which is how
/// received packets are verified.
///
/// # Arguments
///
/// * 'data' - bytes to compute the CRC over
/// * 'init' - initial CRC value, normally 0
pub fn crc16_ccitt(data: &[u8], init: u16) -> u16 {
    let mut msb = (init >> 8) as u8;
    let mut lsb = (init & 0xFF) as u8;

    for b in data {
        let mut x = b ^ msb;
        x ^= x >> 4;
        msb = lsb ^ (x >> 3) ^ (x << 4);
        lsb = x ^ (x << 5);
    }

    ((msb as u16) << 8) | lsb as u16
}

/// Returns true if the CRC over the given bytes, trailing CRC included, is zero
///
/// # Arguments
///
/// * 'data' - bytes ending with their big-endian CRC
pub fn is_valid(data: &[u8]) -> bool {
    crc16_ccitt(data, 0) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc16_ccitt(b"123456789", 0), 0x31C3);
    }

    #[test]
    fn test_empty_input_returns_init() {
        assert_eq!(crc16_ccitt(&[], 0), 0);
        assert_eq!(crc16_ccitt(&[], 0xBEEF), 0xBEEF);
    }

    #[test]
    fn test_appended_crc_verifies_to_zero() {
        let payloads: [&[u8]; 4] = [
            b"LOO",
            b"\x00\x00\x00\x00",
            b"some arbitrary payload\n\r",
            &[0xFF; 97],
        ];

        for payload in payloads {
            let crc = crc16_ccitt(payload, 0);
            let mut framed = payload.to_vec();
            framed.extend_from_slice(&crc.to_be_bytes());

            assert!(is_valid(&framed), "payload {:?} did not verify", payload);
        }
    }

    #[test]
    fn test_init_continues_previous_crc() {
        let data = b"LOOP packet body";
        let (head, tail) = data.split_at(5);

        assert_eq!(crc16_ccitt(tail, crc16_ccitt(head, 0)), crc16_ccitt(data, 0));
    }

    #[test]
    fn test_wrong_trailer_is_not_valid() {
        let mut framed = b"LOO\n\r".to_vec();
        let crc = crc16_ccitt(&framed, 0);
        framed.extend_from_slice(&(crc ^ 0x0001).to_be_bytes());

        assert!(!is_valid(&framed));
    }
}
