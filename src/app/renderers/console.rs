use crate::domain::model::Entity;
use crate::domain::ports::Renderer;

const SEPARATOR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    /// One separator line followed by the present fields, per entity.
    pub fn render_lines(&self, entities: &[Entity]) -> Vec<String> {
        let mut lines = Vec::new();
        for entity in entities {
            lines.push("-".repeat(SEPARATOR_WIDTH));
            lines.push(format!("Name: {}", entity.name));
            for (label, value) in entity.optional_fields() {
                lines.push(format!("{}: {}", label, value));
            }
        }
        lines
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&self, entities: &[Entity]) -> String {
        self.render_lines(entities)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}

pub fn render_console(entities: &[Entity]) -> Vec<String> {
    ConsoleRenderer::new().render_lines(entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lion() -> Entity {
        Entity {
            name: "Lion".to_string(),
            diet: Some("Carnivore".to_string()),
            location: Some("Africa".to_string()),
            animal_type: Some("Mammal".to_string()),
        }
    }

    #[test]
    fn test_full_entity_lines() {
        assert_eq!(
            render_console(&[lion()]),
            vec![
                "------------------------------",
                "Name: Lion",
                "Diet: Carnivore",
                "Location: Africa",
                "Type: Mammal",
            ]
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let fox = Entity {
            name: "Fox".to_string(),
            diet: None,
            location: Some("Europe".to_string()),
            animal_type: None,
        };

        assert_eq!(
            render_console(&[fox]),
            vec!["------------------------------", "Name: Fox", "Location: Europe"]
        );
    }

    #[test]
    fn test_render_is_newline_terminated() {
        let text = ConsoleRenderer::new().render(&[lion()]);
        assert!(text.ends_with("Type: Mammal\n"));
        assert_eq!(text.lines().count(), 5);
        assert_eq!(ConsoleRenderer::new().render(&[]), "");
    }
}
