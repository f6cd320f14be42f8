//! Display mode identifiers.
//!
//! Raw ids match the wire/config values the device firmware has always
//! used, so `from_raw` can dispatch an externally supplied mode byte.

const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_REGISTER_SCROLL: &str = "register_scroll";
const MODE_NAME_BARGRAPH: &str = "bargraph";
const MODE_NAME_BANDED: &str = "banded";
const MODE_NAME_FLASHLIGHT: &str = "flashlight";
const MODE_NAME_FAST_WAVEFORM: &str = "fast_waveform";

const MODE_ID_CHASE: u8 = 0;
const MODE_ID_REGISTER_SCROLL: u8 = 1;
const MODE_ID_BARGRAPH: u8 = 2;
const MODE_ID_BANDED: u8 = 3;
const MODE_ID_FLASHLIGHT: u8 = 4;
const MODE_ID_FAST_WAVEFORM: u8 = 5;

/// Known display modes.
///
/// `Banded` and `Flashlight` are reserved: the engine accepts them but only
/// logs that they are not implemented yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    Chase = MODE_ID_CHASE,
    RegisterScroll = MODE_ID_REGISTER_SCROLL,
    Bargraph = MODE_ID_BARGRAPH,
    Banded = MODE_ID_BANDED,
    Flashlight = MODE_ID_FLASHLIGHT,
    FastWaveform = MODE_ID_FAST_WAVEFORM,
}

impl DisplayMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_CHASE => Self::Chase,
            MODE_ID_REGISTER_SCROLL => Self::RegisterScroll,
            MODE_ID_BARGRAPH => Self::Bargraph,
            MODE_ID_BANDED => Self::Banded,
            MODE_ID_FLASHLIGHT => Self::Flashlight,
            MODE_ID_FAST_WAVEFORM => Self::FastWaveform,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chase => MODE_NAME_CHASE,
            Self::RegisterScroll => MODE_NAME_REGISTER_SCROLL,
            Self::Bargraph => MODE_NAME_BARGRAPH,
            Self::Banded => MODE_NAME_BANDED,
            Self::Flashlight => MODE_NAME_FLASHLIGHT,
            Self::FastWaveform => MODE_NAME_FAST_WAVEFORM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_CHASE => Some(Self::Chase),
            MODE_NAME_REGISTER_SCROLL => Some(Self::RegisterScroll),
            MODE_NAME_BARGRAPH => Some(Self::Bargraph),
            MODE_NAME_BANDED => Some(Self::Banded),
            MODE_NAME_FLASHLIGHT => Some(Self::Flashlight),
            MODE_NAME_FAST_WAVEFORM => Some(Self::FastWaveform),
            _ => None,
        }
    }

    /// Whether the engine has a renderer for this mode.
    pub const fn is_implemented(self) -> bool {
        !matches!(self, Self::Banded | Self::Flashlight)
    }
}
