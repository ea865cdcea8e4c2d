use super::date::{format_event_date, DATE_PLACEHOLDER};
use super::model::{DisplayRecord, RawEventRecord};

pub const UNTITLED_EVENT: &str = "Untitled Event";
pub const LOCATION_PLACEHOLDER: &str = "TBA";
pub const URL_PLACEHOLDER: &str = "#";

/// Keys tried in order, the first one with a value wins
struct FieldAliases {
    keys: &'static [&'static str],
    fallback: &'static str,
}

const NAME: FieldAliases = FieldAliases {
    keys: &["title", "name"],
    fallback: UNTITLED_EVENT,
};

const DATE: FieldAliases = FieldAliases {
    keys: &["date", "startDate"],
    fallback: DATE_PLACEHOLDER,
};

const LOCATION: FieldAliases = FieldAliases {
    keys: &["venue", "location"],
    fallback: LOCATION_PLACEHOLDER,
};

const URL: FieldAliases = FieldAliases {
    keys: &["url", "ticketUrl"],
    fallback: URL_PLACEHOLDER,
};

impl FieldAliases {
    fn first_present(&self, record: &RawEventRecord) -> Option<String> {
        self.keys.iter().find_map(|key| record.text(key))
    }

    fn resolve(&self, record: &RawEventRecord) -> String {
        self.first_present(record)
            .unwrap_or_else(|| self.fallback.to_string())
    }
}

impl From<&RawEventRecord> for DisplayRecord {
    fn from(record: &RawEventRecord) -> Self {
        Self {
            name: NAME.resolve(record),
            date: format_event_date(DATE.first_present(record).as_deref()),
            location: LOCATION.resolve(record),
            url: URL.resolve(record),
        }
    }
}

pub fn normalize_events(events: &[RawEventRecord]) -> Vec<DisplayRecord> {
    events.iter().map(DisplayRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawEventRecord {
        RawEventRecord::from(value)
    }

    #[test_log::test]
    fn when_only_title_is_present_should_fill_placeholders() {
        let result = DisplayRecord::from(&record(json!({ "title": "Foo" })));

        assert_eq!(
            result,
            DisplayRecord {
                name: "Foo".to_string(),
                date: "TBA".to_string(),
                location: "TBA".to_string(),
                url: "#".to_string(),
            }
        );
    }

    #[test_log::test]
    fn when_record_is_empty_should_be_untitled() {
        let result = DisplayRecord::from(&record(json!({})));

        assert_eq!(result.name, "Untitled Event");
        assert_eq!(result.url, "#");
    }

    #[test_log::test]
    fn when_several_aliases_are_present_should_prefer_the_first() {
        let result = DisplayRecord::from(&record(json!({
            "name": "Second",
            "title": "First",
            "location": "Camden",
            "venue": "Electric Ballroom",
            "ticketUrl": "https://tickets.example.com/1",
            "url": "https://events.example.com/1",
            "startDate": "Friday Night",
            "date": "Saturday Night"
        })));

        assert_eq!(result.name, "First");
        assert_eq!(result.location, "Electric Ballroom");
        assert_eq!(result.url, "https://events.example.com/1");
        assert_eq!(result.date, "Saturday Night");
    }

    #[test_log::test]
    fn when_first_alias_is_blank_should_fall_through() {
        let result = DisplayRecord::from(&record(json!({
            "title": "  ",
            "name": "Jazz Night",
            "venue": null,
            "location": "Soho",
            "url": "",
            "ticketUrl": "https://tickets.example.com/jazz"
        })));

        assert_eq!(result.name, "Jazz Night");
        assert_eq!(result.location, "Soho");
        assert_eq!(result.url, "https://tickets.example.com/jazz");
    }

    #[test_log::test]
    fn when_date_is_iso_should_be_formatted() {
        let result = DisplayRecord::from(&record(json!({
            "title": "Techno All Nighter",
            "startDate": "2025-11-22T23:00:00"
        })));

        assert_eq!(result.date, "Sat 22 Nov at 11:00pm");
    }

    #[test_log::test]
    fn when_entry_is_not_an_object_should_use_placeholders() {
        let result = DisplayRecord::from(&record(json!("not an event")));

        assert_eq!(result.name, "Untitled Event");
        assert_eq!(result.location, "TBA");
    }

    #[test_log::test]
    fn should_keep_event_order() {
        let events = vec![
            record(json!({ "title": "A" })),
            record(json!({ "title": "B" })),
            record(json!({ "name": "C" })),
        ];

        let names: Vec<String> = normalize_events(&events)
            .into_iter()
            .map(|event| event.name)
            .collect();

        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
