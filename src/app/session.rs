use crate::core::controller::CatalogController;
use crate::domain::model::{Selection, SortCriterion};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Category(String),
    /// An empty or unknown token clears the sort.
    Sort(String),
    Categories,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word, rest) {
            ("category", "") => Command::Unknown(line.to_string()),
            ("category", name) => Command::Category(name.to_string()),
            ("sort", token) => Command::Sort(token.to_string()),
            ("categories", "") => Command::Categories,
            ("refresh", "") => Command::Refresh,
            ("help", "") => Command::Help,
            ("quit", "") | ("exit", "") => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub refreshes: u64,
}

/// Owns the selector values and triggers a refresh whenever one changes.
pub struct Session<R: Renderer> {
    controller: CatalogController<R>,
    selection: Selection,
    commands: usize,
}

impl<R: Renderer> Session<R> {
    pub fn new(controller: CatalogController<R>, selection: Selection) -> Self {
        Self {
            controller,
            selection,
            commands: 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn controller(&self) -> &CatalogController<R> {
        &self.controller
    }

    pub fn into_controller(self) -> CatalogController<R> {
        self.controller
    }

    /// The unconditional first render.
    pub fn start(&mut self) -> Result<usize> {
        self.controller.refresh(&self.selection)
    }

    pub fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        self.commands += 1;
        match command {
            Command::Category(category) => {
                tracing::debug!("Category changed to '{}'", category);
                self.selection.category = category;
                self.controller.refresh(&self.selection)?;
            }
            Command::Sort(token) => {
                let criterion = SortCriterion::from_token(&token);
                if criterion == SortCriterion::Unsorted && !token.is_empty() {
                    tracing::warn!("Unrecognized sort '{}', keeping catalog order", token);
                }
                self.selection.sort = token;
                self.controller.refresh(&self.selection)?;
            }
            Command::Refresh => {
                self.controller.refresh(&self.selection)?;
            }
            Command::Categories => {
                for option in self.controller.category_options() {
                    let marker = if option.value == self.selection.category {
                        "*"
                    } else {
                        " "
                    };
                    writeln!(out, "{} {} ({})", marker, option.label, option.item_count)?;
                }
            }
            Command::Help => write_help(out)?,
            Command::Quit => return Ok(Flow::Stop),
            Command::Unknown(line) => {
                writeln!(out, "Unknown command: {} (type 'help')", line)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Processes commands line by line until `quit` or end of input.
    pub async fn run<I, W>(&mut self, input: I, out: &mut W) -> Result<SessionSummary>
    where
        I: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            if self.apply(command, out)? == Flow::Stop {
                break;
            }
            out.flush()?;
        }

        Ok(SessionSummary {
            commands: self.commands,
            refreshes: self.controller.refresh_count(),
        })
    }
}

fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  category <name>   show one category ('all' for every category)")?;
    writeln!(out, "  sort <criterion>  one of: {}", sort_tokens().join(", "))?;
    writeln!(out, "  sort              keep catalog order")?;
    writeln!(out, "  categories        list category options")?;
    writeln!(out, "  refresh           render again")?;
    writeln!(out, "  quit              leave")
}

fn sort_tokens() -> Vec<&'static str> {
    SortCriterion::RECOGNIZED
        .iter()
        .map(|criterion| criterion.token())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::MemoryRenderer;
    use crate::domain::model::{Catalog, Item};

    fn session() -> Session<MemoryRenderer> {
        let catalog = Catalog::new()
            .with_category(
                "fruits",
                vec![
                    Item::new("Apple", "1.50", "a.png"),
                    Item::new("Banana", "0.50", "b.png"),
                ],
            )
            .with_category("drinks", vec![Item::new("Water", "1.00", "w.png")]);
        Session::new(
            CatalogController::new(catalog, MemoryRenderer::new()),
            Selection::default(),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(
            Command::parse("category  fruits "),
            Some(Command::Category("fruits".to_string()))
        );
        assert_eq!(
            Command::parse("category ice cream"),
            Some(Command::Category("ice cream".to_string()))
        );
        assert_eq!(
            Command::parse("sort priceAscending"),
            Some(Command::Sort("priceAscending".to_string()))
        );
        assert_eq!(Command::parse("sort"), Some(Command::Sort(String::new())));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(
            Command::parse("category"),
            Some(Command::Unknown("category".to_string()))
        );
        assert_eq!(
            Command::parse("quit now"),
            Some(Command::Unknown("quit now".to_string()))
        );
    }

    #[test]
    fn test_selection_changes_rerender() {
        let mut session = session();
        let mut out: Vec<u8> = Vec::new();
        session.start().unwrap();

        session
            .apply(Command::Category("fruits".to_string()), &mut out)
            .unwrap();
        session
            .apply(Command::Sort("priceAscending".to_string()), &mut out)
            .unwrap();

        let renderer = session.controller().renderer();
        assert_eq!(renderer.names(), vec!["Banana", "Apple"]);
        assert_eq!(renderer.render_count(), 3);
        assert_eq!(session.selection(), &Selection::new("fruits", "priceAscending"));
    }

    #[test]
    fn test_informational_commands_do_not_render() {
        let mut session = session();
        let mut out: Vec<u8> = Vec::new();

        session.apply(Command::Categories, &mut out).unwrap();
        session.apply(Command::Help, &mut out).unwrap();
        session
            .apply(Command::Unknown("dance".to_string()), &mut out)
            .unwrap();

        assert_eq!(session.controller().renderer().render_count(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("* All categories (3)"));
        assert!(text.contains("  fruits (2)"));
        assert!(text.contains("priceAscending, priceDescending, nameAscending, nameDescending"));
        assert!(text.contains("Unknown command: dance"));
    }

    #[test]
    fn test_quit_stops() {
        let mut session = session();
        let flow = session.apply(Command::Quit, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(flow, Flow::Stop);
    }

    #[tokio::test]
    async fn test_run_reads_until_quit() {
        let mut session = session();
        session.start().unwrap();

        let input: &[u8] = b"category drinks\n\nsort nameDescending\nquit\ncategory fruits\n";
        let mut out: Vec<u8> = Vec::new();
        let summary = session.run(input, &mut out).await.unwrap();

        assert_eq!(summary.commands, 3);
        assert_eq!(summary.refreshes, 3);
        assert_eq!(session.controller().renderer().names(), vec!["Water"]);
    }
}
