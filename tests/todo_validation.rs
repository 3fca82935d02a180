#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use todolist::libs::todo::{NewTodo, Todo, TodoId, ValidationError, MAX_TITLE_LEN};

    #[test]
    fn test_title_is_trimmed() {
        let new_todo = NewTodo::parse(Some("  Buy milk  ")).unwrap();
        assert_eq!(new_todo.title(), "Buy milk");
    }

    #[test]
    fn test_blank_or_missing_title_rejected() {
        assert_eq!(NewTodo::parse(None), Err(ValidationError::TitleRequired));
        assert_eq!(NewTodo::parse(Some("")), Err(ValidationError::TitleRequired));
        assert_eq!(NewTodo::parse(Some("   \t\n")), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_title_length_limit() {
        let at_limit = "a".repeat(MAX_TITLE_LEN);
        assert!(NewTodo::parse(Some(&at_limit)).is_ok());

        let over_limit = "a".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(NewTodo::parse(Some(&over_limit)), Err(ValidationError::TitleTooLong));

        // Surrounding whitespace does not count
        let padded = format!("  {}  ", at_limit);
        assert_eq!(NewTodo::parse(Some(&padded)).unwrap().title(), at_limit);
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 255 two-byte characters are 510 bytes but still within the limit
        let accented = "č".repeat(MAX_TITLE_LEN);
        assert!(NewTodo::parse(Some(&accented)).is_ok());
        assert_eq!(NewTodo::parse(Some(&format!("{}č", accented))), Err(ValidationError::TitleTooLong));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::TitleRequired.to_string(), "Title is required and cannot be empty");
        assert_eq!(ValidationError::TitleTooLong.to_string(), "Title cannot exceed 255 characters");
        assert_eq!(ValidationError::InvalidId.to_string(), "Invalid todo ID");
    }

    #[test]
    fn test_todo_id_parsing() {
        assert_eq!("1".parse::<TodoId>().unwrap().get(), 1);
        assert_eq!("42".parse::<TodoId>().unwrap().get(), 42);

        for bad in ["", "0", "-1", "abc", "12abc", "1.5", " 7", "+3", "99999999999999999999"] {
            assert_eq!(bad.parse::<TodoId>(), Err(ValidationError::InvalidId), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_todo_id_must_be_positive() {
        assert!(TodoId::new(1).is_ok());
        assert_eq!(TodoId::new(0), Err(ValidationError::InvalidId));
        assert_eq!(TodoId::new(-5), Err(ValidationError::InvalidId));
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo {
            id: TodoId::new(7).unwrap(),
            title: "Write report".to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Write report");
        assert_eq!(value["completed"], false);
        assert_eq!(value["created_at"], "2025-01-15T10:00:00Z");

        let parsed: Todo = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, todo);
    }
}
