pub mod site;
pub mod terminal;
pub mod urls;

pub use site::{SITE_DIR_ENV, format_path_with_tilde, resolve_site_dir};
pub use terminal::strip_ansi_codes;
pub use urls::{decode_url_slug, encode_url, validate_file_size};
