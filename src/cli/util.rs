use anyhow::Result;
use std::io::{self, Write};

pub(crate) fn prompt_string_with_default(prompt: &str, default: &str) -> Result<String> {
    print!("{prompt} (default: {default}): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn prompt_port_with_default(prompt: &str, default: u16) -> Result<u16> {
    loop {
        print!("{prompt} (default: {default}): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Ok(default);
        }

        match trimmed.parse::<u16>() {
            Ok(port) if port > 0 => return Ok(port),
            Ok(_) => println!("❌ Port must be greater than zero."),
            Err(_) => println!("❌ Please enter a valid port number."),
        }
    }
}

pub(crate) fn prompt_timeout(default: u64) -> Result<u64> {
    loop {
        print!("⏱️  Enter timeout in seconds (default: {default}): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let timeout_str = input.trim();

        if timeout_str.is_empty() {
            return Ok(default);
        }

        match timeout_str.parse::<u64>() {
            Ok(timeout) if timeout > 0 => return Ok(timeout),
            Ok(_) => println!("❌ Timeout must be a positive number."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible = key.len().min(8);
    format!("{}***", &key[..visible])
}

#[cfg(test)]
mod tests {
    use super::mask_api_key;

    #[test]
    fn mask_api_key_hides_the_tail() {
        assert_eq!(mask_api_key(""), "(not set)");
        assert_eq!(mask_api_key("abc"), "abc***");
        assert_eq!(mask_api_key("0123456789abcdef"), "01234567***");
    }
}
