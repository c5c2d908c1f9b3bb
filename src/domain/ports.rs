use crate::domain::model::Entity;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait Renderer {
    fn render(&self, entities: &[Entity]) -> String;
}
