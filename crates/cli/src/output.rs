use dnsq_domain::{Header, Message};

/// Lowercase hex, `per_line` bytes per line, bytes joined by `:`.
pub fn hex_dump(bytes: &[u8], per_line: usize) -> String {
    bytes
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(":")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_header(header: &Header) {
    println!("{}", header);
    println!("{}", hex_dump(&header.encode(), 2));
}

pub fn print_raw(bytes: &[u8]) {
    println!("{} bytes", bytes.len());
    println!("{}", hex_dump(bytes, 6));
}

pub fn print_packet(title: &str, message: &Message) {
    println!("### {} Packet", title);
    println!("{}", message);
    println!("### END {} Packet", title);
}
