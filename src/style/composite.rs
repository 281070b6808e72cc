/// Value of the `composite` style (`globalCompositeOperation`).
///
/// The first eleven are the Porter-Duff operators, the rest are blend modes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CompositeOperation {
    #[default]
    SourceOver,
    SourceIn,
    SourceOut,
    SourceAtop,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    DestinationAtop,
    Lighter,
    Copy,
    Xor,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl CompositeOperation {
    pub fn is_blend_mode(self) -> bool {
        (self as u8) > (CompositeOperation::Xor as u8)
    }
}
