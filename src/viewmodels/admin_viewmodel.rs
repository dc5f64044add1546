use crate::models::AdminBooking;

/// What #adminBookingsContainer should show
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AdminBookingsView {
    Unavailable,
    Table {
        columns: Vec<&'static str>,
        rows: Vec<Vec<String>>,
    },
}

impl AdminBookingsView {
    pub fn from_fetch(bookings: Option<Vec<AdminBooking>>) -> Self {
        match bookings {
            None => AdminBookingsView::Unavailable,
            Some(bookings) => AdminBookingsView::Table {
                columns: AdminBooking::COLUMNS.to_vec(),
                rows: bookings.iter().map(AdminBooking::cells).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_data_is_unavailable() {
        assert_eq!(AdminBookingsView::from_fetch(None), AdminBookingsView::Unavailable);
    }

    #[test]
    fn test_empty_list_still_renders_table() {
        match AdminBookingsView::from_fetch(Some(Vec::new())) {
            AdminBookingsView::Table { columns, rows } => {
                assert_eq!(columns.len(), 7);
                assert!(rows.is_empty());
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_follow_columns() {
        let booking = AdminBooking::from_value(json!({
            "id": 5,
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "555-0199",
            "bikeModel": "Hunter 350",
            "serviceType": "Brakes",
            "serviceDate": "2024-06-02"
        }));
        let view = AdminBookingsView::from_fetch(Some(vec![booking]));
        let AdminBookingsView::Table { rows, .. } = view else {
            panic!("expected table");
        };
        assert_eq!(
            rows[0],
            vec!["5", "Ravi", "ravi@example.com", "555-0199", "Hunter 350", "Brakes", "2024-06-02"]
        );
    }
}
