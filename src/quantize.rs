use num_traits::{ToPrimitive, Zero};

/// Full scale of a signed 16 bit sample. Normalized floats are multiplied by
/// this before truncation, so that -1.0 lands exactly on `i16::MIN`.
pub const I16_FULL_SCALE: f64 = 32768.0;

/// Conversion of a raw sample value into a 16 bit signed sample.
///
/// Every conversion truncates toward zero and saturates at the 16 bit range;
/// nothing rounds.
pub trait Quantize: Copy {
    fn quantize(self) -> i16;
}

impl Quantize for f32 {
    fn quantize(self) -> i16 {
        (self as f64).quantize()
    }
}

impl Quantize for f64 {
    /// Normalized float in [-1.0, 1.0]. Float to int `as` casts truncate,
    /// saturate at the bounds, and send NaN to 0.
    fn quantize(self) -> i16 {
        (self * I16_FULL_SCALE) as i16
    }
}

macro_rules! impl_quantize_integer {
    ($type_name: ty) => {
        impl Quantize for $type_name {
            fn quantize(self) -> i16 {
                saturate(self)
            }
        }
    };
}

impl_quantize_integer!(i8);
impl_quantize_integer!(i16);
impl_quantize_integer!(i32);
impl_quantize_integer!(i64);

/// Narrow an integer into the 16 bit range, pinning anything outside it to the
/// nearest bound.
pub fn saturate<T>(value: T) -> i16
where
    T: ToPrimitive + PartialOrd + Zero,
{
    value.to_i16().unwrap_or(if value < T::zero() {
        i16::MIN
    } else {
        i16::MAX
    })
}

pub fn quantize_all<T: Quantize>(samples: &[T]) -> Vec<i16> {
    samples.iter().map(|s| s.quantize()).collect()
}

/// Bring an integer PCM sample stored at `bits_per_sample` to 16 bits.
///
/// Wider samples lose their low bits, narrower ones are shifted up to span
/// the full range. 16 bit samples pass through untouched.
pub fn quantize_pcm(value: i32, bits_per_sample: u16) -> i16 {
    match bits_per_sample {
        16 => saturate(value),
        b if b > 16 => saturate(value >> (b.min(32) - 16)),
        b => saturate(value << (16 - b)),
    }
}
