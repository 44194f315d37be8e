use contracts::shared::{FieldValue, Record, SortDirection};
use frontend::shared::data_source::MemoryDataSource;
use frontend::shared::list_screen::ListScreen;
use frontend::shared::list_view::{ListEvent, ListMode, ListViewModel, LoadState};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: i64,
    name: String,
}

impl Record for Item {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "name" => FieldValue::text(&self.name),
            _ => FieldValue::Missing,
        }
    }
}

fn items(names: &[&str]) -> Vec<Item> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Item {
            id: i as i64 + 1,
            name: n.to_string(),
        })
        .collect()
}

fn visible_names<R: Record + Send + 'static>(screen: &ListScreen<R>) -> Vec<String> {
    screen
        .visible_page()
        .items
        .iter()
        .map(|item| match item.field("name") {
            FieldValue::Text(name) => name,
            _ => String::new(),
        })
        .collect()
}

fn keys() -> Vec<String> {
    vec!["name".to_string()]
}

fn client_screen(names: &[&str], page_size: usize) -> ListScreen<Item> {
    let source = MemoryDataSource::new(items(names), keys());
    let view_model = ListViewModel::new(ListMode::Client, page_size).with_search_keys(keys());
    ListScreen::new(view_model, Box::new(source), 100)
}

fn server_screen(names: &[&str], page_size: usize) -> ListScreen<Item> {
    let source = MemoryDataSource::new(items(names), keys());
    let view_model = ListViewModel::new(ListMode::Server, page_size).with_search_keys(keys());
    ListScreen::new(view_model, Box::new(source), page_size)
}

#[tokio::test]
async fn sorted_pages_over_full_collection() {
    let mut screen = client_screen(&["B", "D", "A", "C", "E"], 2);
    screen.refresh().await;
    screen
        .view_model_mut()
        .set_sort(Some("name"), SortDirection::Asc);

    assert_eq!(visible_names(&screen), vec!["A", "B"]);
    screen.go_to_page(2).await;
    assert_eq!(visible_names(&screen), vec!["C", "D"]);
    screen.go_to_page(3).await;
    assert_eq!(visible_names(&screen), vec!["E"]);
    assert_eq!(screen.visible_page().total_pages, 3);
}

#[tokio::test]
async fn search_without_matches_resets_to_first_page() {
    let mut screen = client_screen(&["B", "D", "A", "C", "E"], 2);
    screen.refresh().await;
    screen.go_to_page(2).await;
    screen.search("x").await;

    let page = screen.visible_page();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page_index, 1);
}

#[tokio::test]
async fn clearing_search_returns_to_first_page() {
    let mut screen = client_screen(&["Alpha", "Beta", "Gamma", "Delta", "Omega"], 2);
    screen.refresh().await;
    screen.search("a").await;
    screen.go_to_page(2).await;
    assert_eq!(screen.view_model().page_index(), 2);

    screen.search("").await;
    assert_eq!(screen.view_model().page_index(), 1);
}

#[tokio::test]
async fn out_of_order_server_responses() {
    let source = MemoryDataSource::new(items(&["A", "B", "C", "D", "E", "F"]), keys());
    let mut vm: ListViewModel<Item> = ListViewModel::new(ListMode::Server, 2);

    let initial = vm.reload().unwrap();
    assert!(vm.complete(initial.run(&source).await));
    assert_eq!(vm.total_pages(), 3);

    let first = vm.go_to_page(1).unwrap();
    let second = vm.go_to_page(2).unwrap();
    let (first_outcome, second_outcome) = tokio::join!(first.run(&source), second.run(&source));

    // Ответ на страницу 2 приходит раньше
    assert!(vm.complete(second_outcome));
    assert!(!vm.complete(first_outcome));

    let page = vm.visible_page();
    assert_eq!(page.page_index, 2);
    let names: Vec<&str> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["C", "D"]);
}

#[tokio::test]
async fn server_search_delegates_to_source() {
    let mut screen = server_screen(&["Alpha", "Beta", "Gamma", "Delta", "Omega"], 2);
    screen.refresh().await;
    assert_eq!(screen.visible_page().total_count, 5);

    screen.search("ta").await;
    assert_eq!(visible_names(&screen), vec!["Beta", "Delta"]);
    assert_eq!(screen.visible_page().total_count, 2);

    screen.sort_by("name");
    screen.sort_by("name");
    assert_eq!(visible_names(&screen), vec!["Delta", "Beta"]);
}

#[tokio::test]
async fn failed_fetch_keeps_displayed_page() {
    let source = MemoryDataSource::new(items(&["A", "B", "C", "D"]), keys());
    let mut vm: ListViewModel<Item> = ListViewModel::new(ListMode::Server, 2);
    let initial = vm.reload().unwrap();
    vm.complete(initial.run(&source).await);
    vm.take_events();

    source.set_failing(true);
    let request = vm.go_to_page(2).unwrap();
    assert!(vm.complete(request.run(&source).await));

    let page = vm.visible_page();
    assert_eq!(page.page_index, 1);
    let names: Vec<&str> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(matches!(vm.load_state(), LoadState::Error(_)));
    assert!(matches!(
        vm.take_events().as_slice(),
        [ListEvent::FetchFailed { page_index: 2, .. }]
    ));
}

#[tokio::test]
async fn failed_page_switch_on_screen_keeps_page_number() {
    let source = MemoryDataSource::new(items(&["A", "B", "C", "D", "E", "F"]), keys());
    let view_model = ListViewModel::new(ListMode::Server, 2).with_search_keys(keys());
    let mut screen: ListScreen<Item> = ListScreen::new(view_model, Box::new(source), 2);
    screen.refresh().await;
    screen.go_to_page(2).await;
    assert_eq!(visible_names(&screen), vec!["C", "D"]);

    let offline = MemoryDataSource::new(items(&["A"]), keys());
    offline.set_failing(true);
    let request = screen.view_model_mut().go_to_page(3).unwrap();
    let outcome = request.run(&offline).await;
    assert!(screen.view_model_mut().complete(outcome));

    let page = screen.visible_page();
    assert_eq!(page.page_index, 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(visible_names(&screen), vec!["C", "D"]);
    assert!(screen.view_model().load_state().error().is_some());
}
