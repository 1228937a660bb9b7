use addressbook_bot::error::{CommandError, CommandResult};
use addressbook_bot::ContactService;
use std::collections::HashMap;

/// Mock contact service for testing.
///
/// Records every call with its arguments and answers with canned replies, so
/// tests can check exactly what the executor forwarded.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockContactService {
    calls: Vec<(String, Vec<String>)>,
    call_counts: HashMap<String, usize>,
    fail_with: Option<CommandError>,
}

#[allow(dead_code)]
impl MockContactService {
    /// Create a mock that answers every call successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with `error`.
    pub fn failing(error: CommandError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.get(method).unwrap_or(&0)
    }

    /// Arguments of the most recent call.
    pub fn last_call(&self) -> Option<&(String, Vec<String>)> {
        self.calls.last()
    }

    fn track_call(&mut self, method: &str, args: &[&str]) -> CommandResult<String> {
        *self.call_counts.entry(method.to_string()).or_insert(0) += 1;
        self.calls.push((
            method.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));

        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(format!("{} ok", method)),
        }
    }
}

impl ContactService for MockContactService {
    fn add_contact(&mut self, name: &str, phones: &[&str]) -> CommandResult<String> {
        let mut args = vec![name];
        args.extend_from_slice(phones);
        self.track_call("add_contact", &args)
    }

    fn change_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> CommandResult<String> {
        self.track_call("change_contact", &[name, old_phone, new_phone])
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        // Read-only in the trait, so calls are not tracked
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(format!("phones of {}", name)),
        }
    }

    fn show_all(&self) -> CommandResult<String> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok("everyone".to_string()),
        }
    }

    fn remove_contact(&mut self, name: &str) -> CommandResult<String> {
        self.track_call("remove_contact", &[name])
    }
}
