//! Path/link mapping between the content tree and public routes.

pub mod path_codec;
