use contracts::usecases::u501_query_console::QueryResult;
use leptos::prelude::*;
use thaw::*;

/// Generated SQL with a copy button, followed by the result table.
///
/// Header columns come from the first row; every row is laid out against them.
#[component]
#[allow(non_snake_case)]
pub fn ResultPanel(result: QueryResult, on_copy: Callback<()>) -> impl IntoView {
    let columns = result.columns();
    let rows: Vec<Vec<String>> = result
        .data
        .iter()
        .map(|row| QueryResult::cells(row, &columns))
        .collect();
    let status = rows_label(result.row_count());

    view! {
        <div class="query-console__result">
            <p class="query-console__section-title">"Generated SQL:"</p>
            <pre class="query-console__sql">{result.sql.clone()}</pre>
            <div class="query-console__copy">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_copy.run(())
                >
                    "Copy"
                </Button>
            </div>

            {result
                .message
                .clone()
                .map(|message| view! { <p class="query-console__message">{message}</p> })}

            <p class="query-console__section-title">"Output:"</p>
            <div class="query-console__table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {columns
                                .into_iter()
                                .map(|column| view! { <TableHeaderCell>{column}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows
                            .into_iter()
                            .map(|cells| {
                                view! {
                                    <TableRow>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                            .collect_view()}
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
            <p class="query-console__status">{status}</p>
        </div>
    }
}

fn rows_label(count: usize) -> String {
    if count == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", count)
    }
}
