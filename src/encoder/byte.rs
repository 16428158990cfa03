/// Convert UTF-16 code units to the UTF-8 bytes a byte-mode segment
/// carries.
///
/// Well-formed surrogate pairs become one 4-byte sequence. A lone
/// surrogate is encoded as the 3-byte sequence of its own code unit
/// value, so malformed input still yields a deterministic payload
/// instead of failing.
pub fn utf16_to_bytes(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        if (0xD800..0xDC00).contains(&unit) && i + 1 < units.len() {
            let next = units[i + 1];
            if (0xDC00..0xE000).contains(&next) {
                let cp =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(next) - 0xDC00);
                push_code_point(&mut out, cp);
                i += 2;
                continue;
            }
        }
        push_code_point(&mut out, u32::from(unit));
        i += 1;
    }
    out
}

/// Append the shortest UTF-8 sequence for `cp`
fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push(0xC0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else if cp < 0x10000 {
        out.push(0xE0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else {
        out.push(0xF0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    }
}
