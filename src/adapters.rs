pub mod bcrypt_hasher;
pub use bcrypt_hasher::BcryptHasher;
pub mod uuid_generator;
pub use uuid_generator::UuidGenerator;
pub mod dialing_plan;
pub use dialing_plan::{DialingPlan, DialingPlanTable};
pub mod static_mx;
pub use static_mx::StaticMxLookup;
