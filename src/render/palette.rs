pub const CHANNEL_FLOOR: u8 = 90; // about 35% brightness
const MULTIPLIERS: [u64; 3] = [11909, 52973, 44111]; // r, g, b

pub fn palette_color(p: usize) -> [u8; 4] {
    let n = p as u64 + 1;
    let channel = |m: u64| ((n.wrapping_mul(m) % 256) as u8).max(CHANNEL_FLOOR);
    [channel(MULTIPLIERS[0]), channel(MULTIPLIERS[1]), channel(MULTIPLIERS[2]), 255]
}

/// RGBA8 bytes for a `steps × iters` texture, row `i` holding iteration `i`.
pub fn palette_rgba(iters: usize, steps: usize) -> Vec<u8> {
    (0..iters * steps).flat_map(palette_color).collect()
}
