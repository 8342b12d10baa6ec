//! Numbered menu.

pub const MENU: &[&str] = &[
    "*** Refrigerator Menu ***",
    "1. Insert Product",
    "2. Consume Product",
    "3. Show Refrigerator Status",
    "4. Show Action History",
    "5. Check Expired Products",
    "6. Generate Shopping List",
    "7. Exit",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Consume,
    Status,
    History,
    CheckExpired,
    ShoppingList,
    Exit,
}

impl core::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Insert),
            "2" => Ok(MenuChoice::Consume),
            "3" => Ok(MenuChoice::Status),
            "4" => Ok(MenuChoice::History),
            "5" => Ok(MenuChoice::CheckExpired),
            "6" => Ok(MenuChoice::ShoppingList),
            "7" => Ok(MenuChoice::Exit),
            other => Err(format!("unknown menu choice '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_choices() {
        assert_eq!(" 1 ".parse::<MenuChoice>(), Ok(MenuChoice::Insert));
        assert_eq!("7".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!(
            "8".parse::<MenuChoice>(),
            Err("unknown menu choice '8'".to_string())
        );
        assert!("insert".parse::<MenuChoice>().is_err());
        assert_eq!(MENU.len(), 8);
    }
}
