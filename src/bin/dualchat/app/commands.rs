use dualchat::secret_store::SecretStore;

use crate::args::KeyAction;

pub fn handle_key(action: &KeyAction) -> anyhow::Result<()> {
    let mut store = SecretStore::new()?;
    match action {
        KeyAction::Set { value, name } => {
            store.set(name, value)?;
            println!("Secret '{name}' has been set.");
        }
        KeyAction::Get { name } => match store.get(name) {
            Some(value) => println!("{name}: {}", mask(value)),
            None => println!("Secret '{name}' not found"),
        },
        KeyAction::Delete { name } => {
            if store.delete(name)? {
                println!("Secret '{name}' deleted.");
            } else {
                println!("Secret '{name}' not found");
            }
        }
    }
    Ok(())
}

/// Shows only the last four characters of a key.
fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::mask;

    #[test]
    fn masks_all_but_tail() {
        assert_eq!(mask("abcdefgh"), "****efgh");
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask(""), "");
    }
}
