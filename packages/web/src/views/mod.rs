mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;
