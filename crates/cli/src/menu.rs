//! Top-level menu entries.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Update,
    Search,
    List,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Update,
        MenuChoice::Search,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::List),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Remove => "2",
            MenuChoice::Update => "3",
            MenuChoice::Search => "4",
            MenuChoice::List => "5",
            MenuChoice::Exit => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add product",
            MenuChoice::Remove => "Remove product",
            MenuChoice::Update => "Update product",
            MenuChoice::Search => "Search products by name",
            MenuChoice::List => "List inventory",
            MenuChoice::Exit => "Exit",
        }
    }
}
