pub const PI: f32 = std::f32::consts::PI;


#[inline]
pub fn abs(s: f32) -> f32 {
    if s >= 0.0 {
        s
    } else {
        -s
    }
}

#[inline]
pub fn max(s1: f32, s2: f32) -> f32 {
    if s1 > s2 {
        s1
    } else {
        s2
    }
}

#[inline]
pub fn min(s1: f32, s2: f32) -> f32 {
    if s1 < s2 {
        s1
    } else {
        s2
    }
}

/// Clamps `s` into `[min, max]`. When the bounds are inverted `min` wins.
#[inline]
pub fn clamp(s: f32, min: f32, max: f32) -> f32 {
    self::max(min, self::min(max, s))
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}
