//! Input decoding. Deployments feed both UTF-8 and Latin-1 exports, so a
//! file that is not valid UTF-8 is reinterpreted byte-for-byte as Latin-1.

pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => error
            .into_bytes()
            .iter()
            .map(|&byte| char::from(byte))
            .collect(),
    }
}
