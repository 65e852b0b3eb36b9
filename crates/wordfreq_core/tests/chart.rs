use wordfreq_core::{ChartKind, ChartKindParseError};

#[test]
fn parses_names_and_labels() {
    assert_eq!("bar".parse::<ChartKind>(), Ok(ChartKind::Bar));
    assert_eq!("Horizontal-Bar".parse::<ChartKind>(), Ok(ChartKind::HorizontalBar));
    assert_eq!("词云图".parse::<ChartKind>(), Ok(ChartKind::WordCloud));
    assert_eq!("条形图".parse::<ChartKind>(), Ok(ChartKind::HorizontalBar));
    assert_eq!(
        "radar".parse::<ChartKind>(),
        Err(ChartKindParseError("radar".to_string()))
    );
}

#[test]
fn display_round_trips_through_from_str() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.to_string().parse::<ChartKind>(), Ok(kind));
        assert_eq!(kind.label().parse::<ChartKind>(), Ok(kind));
    }
}

#[test]
fn default_is_first_selector_entry() {
    assert_eq!(ChartKind::default(), ChartKind::ALL[0]);
}
