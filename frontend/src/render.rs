use crate::state::ViewState;

/// Text rendition of the form, one widget per line.
pub fn render(state: &ViewState) -> String {
    let mut lines = vec![
        "== User Registration ==".to_string(),
        format!("Email: {}", state.email),
        format!("Password: {}", "*".repeat(state.password.chars().count())),
        "[Register] [Check Registration Status] [Deactivate User]".to_string(),
    ];
    if !state.message.is_empty() {
        lines.push(format!("> {}", state.message));
    }
    lines.push(format!(
        "User is: {}",
        if state.is_registered {
            "Registered"
        } else {
            "Not Registered"
        }
    ));
    if state.is_deactivated {
        lines.push("User is deactivated.".to_string());
    }

    lines.push(String::new());
    lines.push("== Data Storage ==".to_string());
    lines.push(format!("Data to store: {}", state.data));
    lines.push("[Write Data]".to_string());
    lines.push(format!("Data ID to retrieve: {}", state.data_id));
    lines.push("[Get Data]".to_string());
    if !state.retrieved_data.is_empty() {
        lines.push(format!("Retrieved Data: {}", state.retrieved_data));
    }
    lines.push(format!("New data to update: {}", state.new_data));
    lines.push("[Update Data]".to_string());

    lines.push("-- Delete Data --".to_string());
    lines.push(format!("Data ID to delete: {}", state.data_id));
    lines.push("[Delete Data]".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_view() {
        let out = render(&ViewState::default());
        assert!(out.contains("User is: Not Registered"));
        assert!(!out.contains("User is deactivated."));
        assert!(!out.contains("Retrieved Data:"));
        assert!(!out.contains("> "));
    }

    #[test]
    fn test_filled_view() {
        let state = ViewState {
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
            data_id: "7".to_string(),
            is_registered: true,
            is_deactivated: true,
            message: "Data retrieved successfully!".to_string(),
            retrieved_data: "payload".to_string(),
            ..Default::default()
        };
        let out = render(&state);

        assert!(out.contains("Email: alice@example.com"));
        assert!(out.contains("Password: *******"));
        assert!(!out.contains("hunter2"));
        assert!(out.contains("> Data retrieved successfully!"));
        assert!(out.contains("User is: Registered"));
        assert!(out.contains("User is deactivated."));
        assert!(out.contains("Retrieved Data: payload"));
        // The delete section echoes the shared identifier.
        assert!(out.contains("Data ID to retrieve: 7"));
        assert!(out.contains("Data ID to delete: 7"));
    }
}
