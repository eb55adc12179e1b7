mod id_generator;
mod validator;

pub use id_generator::IIdGenerator;
pub use validator::IValidator;
