use uuid::Uuid;

use crate::ports::IdGenerator;

// IDs aleatórios (v4), mesmo padrão das entidades do backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
