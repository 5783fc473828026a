pub mod fragment;
pub mod share;

pub use fragment::{CodecError, decode_fragment, encode_fragment};
pub use share::{Location, qr_image_url};
