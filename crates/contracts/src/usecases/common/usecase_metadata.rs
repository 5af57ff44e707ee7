/// UseCase metadata used for identification and page titles
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "query_console")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_query_console"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Browser tab title, e.g. "u501 · Interact with DataBase"
    fn page_title() -> String {
        format!("{} · {}", Self::usecase_index(), Self::display_name())
    }
}
