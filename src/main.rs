//! PocketReader — a minimal mobile-style reading browser.
//!
//! Console demo mode: exercises the storage, screens, and engine adapter
//! without a platform webview attached.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║             PocketReader v{} — Demo Mode               ║", env!("CARGO_PKG_VERSION"));
    println!("║       Minimal reading browser with bookmarks & history       ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_repository();
    demo_metadata_parsing();
    demo_ad_filter();
    demo_link_rules();
    demo_home_screen();
    demo_bookmarks_screen();
    demo_webview_screen();
    demo_engine_adapter();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("  PocketReader is ready for platform webview integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use pocketreader::database::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_repository() {
    use pocketreader::database::Database;
    use pocketreader::repository::{Repository, RepositoryTrait};
    section("Repository");

    let repo = Repository::new(Database::open_in_memory().unwrap()).unwrap();

    repo.insert_bookmark("Rust Blog", "https://blog.rust-lang.org", 1000).unwrap();
    repo.insert_bookmark("Crates", "https://crates.io", 2000).unwrap();
    println!("  Inserted 2 bookmarks");

    let all = repo.get_all_bookmarks().unwrap();
    println!("  Newest first: {}", all[0].title);
    println!("  Bookmarked crates.io: {}", repo.is_bookmarked("https://crates.io").unwrap());

    repo.save_to_history("Docs", "https://docs.rs", 3000).unwrap();
    println!("  History entries: {}", repo.get_history().unwrap().len());

    let watched = repo.watch_bookmarks().borrow().clone();
    println!("  Live snapshot sees {} bookmark(s)", watched.len());

    let json = serde_json::to_string(&watched[0]).unwrap();
    println!("  Serialized: {}", json);
    println!("  ✓ Repository OK");
    println!();
}

fn demo_metadata_parsing() {
    use pocketreader::services::metadata_fetcher::parse_web_info;
    use url::Url;
    section("Metadata Parsing");

    let html = r#"<html><head>
        <meta property="og:title" content="Why Rust?">
        <title>fallback title</title>
    </head><body>
        <h1>Why Rust?</h1>
        <p>Memory safety without garbage collection.</p>
        <img src="/hero.png"><a href="/about">About</a>
    </body></html>"#;

    let base = Url::parse("https://blog.example.com/rust").unwrap();
    let info = parse_web_info(html, &base);
    println!("  Title: {}", info.title);
    println!("  Domain: {}", info.domain);
    println!("  Text: {} chars", info.text.len());
    println!("  Images: {:?}", info.images);
    println!("  Links: {:?}", info.links);
    println!("  ✓ Metadata parsing OK");
    println!();
}

fn demo_ad_filter() {
    use pocketreader::services::ad_filter::AdFilter;
    section("Ad Filter");

    let filter = AdFilter::new();
    let blocked = filter.intercept_request("https://stats.doubleclick.net/pixel.gif");
    println!("  doubleclick.net request blocked: {}", blocked.is_some());

    let passed = filter.intercept_request("https://example.com/article");
    println!("  example.com request passed: {}", passed.is_none());
    println!("  ✓ AdFilter OK");
    println!();
}

fn demo_link_rules() {
    use pocketreader::services::link_rules;
    section("Link Rules");

    let medium = "https://medium.com/@author/some-post";
    println!("  Medium article detected: {}", link_rules::is_medium_url(medium));
    println!("  Rewritten: {}", link_rules::to_freedium_url(medium));
    println!("  tel: is external: {}", link_rules::is_external_scheme("tel:+123456"));
    println!("  ✓ Link rules OK");
    println!();
}

fn demo_home_screen() {
    use pocketreader::database::Database;
    use pocketreader::repository::Repository;
    use pocketreader::screens::home::HomeScreen;
    use pocketreader::services::metadata_fetcher::WebFetcher;
    section("Home Screen");

    let repo = Repository::new(Database::open_in_memory().unwrap()).unwrap();
    let mut home = HomeScreen::new(repo, WebFetcher::new().unwrap());

    home.on_url_change("not a url");
    println!("  Submit 'not a url' accepted: {}", home.submit_url());
    println!("  Status: {:?}", home.state().status);

    home.on_url_change("https://example.com");
    println!("  Submit 'https://example.com' accepted: {}", home.submit_url());

    home.toggle_history_view();
    println!("  History view visible: {}", home.state().is_history_view_visible);
    println!("  ✓ HomeScreen OK");
    println!();
}

fn demo_bookmarks_screen() {
    use pocketreader::database::Database;
    use pocketreader::repository::Repository;
    use pocketreader::screens::bookmarks::{BookmarksScreen, SortType};
    section("Bookmarks Screen");

    let repo = Repository::new(Database::open_in_memory().unwrap()).unwrap();
    let mut screen = BookmarksScreen::new(repo);

    screen.save_bookmark("https://blog.rust-lang.org", "Rust Blog");
    screen.save_bookmark("https://crates.io", "Crates");
    screen.save_bookmark("https://docs.rs", "Docs");
    println!("  Saved 3 bookmarks, showing {}", screen.state().bookmarks.len());
    println!("  Status: {}", screen.state().status.message().unwrap_or(""));

    screen.update_search_query("rust");
    println!("  Filter 'rust': {} match(es)", screen.state().bookmarks.len());

    screen.update_search_query("");
    screen.set_sort_type(SortType::TitleAsc);
    println!("  Title sort, first: {}", screen.state().bookmarks[0].title);

    let id = screen.state().bookmarks[0].id;
    screen.delete_bookmark(id);
    println!("  Deleted one, remaining: {}", screen.state().bookmarks.len());
    println!("  ✓ BookmarksScreen OK");
    println!();
}

fn demo_webview_screen() {
    use pocketreader::database::Database;
    use pocketreader::repository::Repository;
    use pocketreader::screens::webview::{normalize_submit_url, WebviewScreen};
    section("Webview Screen");

    let repo = Repository::new(Database::open_in_memory().unwrap()).unwrap();
    let mut screen = WebviewScreen::new(repo);

    screen.update_progress(40);
    println!("  Progress 40, loading: {}", screen.state().is_loading);
    screen.update_progress(100);
    println!("  Progress 100, loading: {}", screen.state().is_loading);

    let saved = screen.save_to_history("https://example.com", "Example");
    let dup = screen.save_to_history("https://example.com", "Example");
    println!("  First save: {}, duplicate save: {}", saved, dup);

    println!("  Normalize 'rust-lang.org': {:?}", normalize_submit_url("rust-lang.org"));
    println!("  Normalize 'cat pictures': {:?}", normalize_submit_url("cat pictures"));
    println!("  ✓ WebviewScreen OK");
    println!();
}

fn demo_engine_adapter() {
    use pocketreader::database::Database;
    use pocketreader::engine::adapter::{EngineAdapter, EngineEvent, NavigationDecision};
    use pocketreader::repository::Repository;
    section("Engine Adapter");

    let repo = Repository::new(Database::open_in_memory().unwrap()).unwrap();
    let mut adapter = EngineAdapter::new(repo);

    adapter.handle_event(EngineEvent::PageFinished {
        url: "https://medium.com/@a/post".to_string(),
        title: "A Post".to_string(),
    });
    let prompt = adapter.take_medium_prompt();
    println!("  Medium prompt raised: {}", prompt.is_some());
    if let Some(p) = prompt {
        println!("  Accept -> {:?}", adapter.accept_medium_prompt(&p.url));
    }

    let decision = adapter.decide_navigation("mailto:someone@example.com");
    println!("  mailto: decision: {:?}", decision);
    assert!(matches!(decision, NavigationDecision::OpenExternal(_)));

    let commands = adapter.toggle_desktop_mode();
    println!("  Desktop toggle emits {} command(s)", commands.len());
    println!("  ✓ EngineAdapter OK");
    println!();
}

fn demo_app_core() {
    use pocketreader::app::{App, Intent, Route};
    section("App Core");

    let app = App::open_in_memory().unwrap();
    println!("  Initialized App with repository and 3 screens");
    println!("  Bookmarks showing: {}", app.bookmarks.state().bookmarks.len());

    let route = App::route_intent(&Intent::Share("read this https://example.com/a".into()));
    println!("  Share intent routes to: {:?}", route);
    assert!(matches!(route, Route::Browser { .. }));
    println!("  ✓ App Core OK");
}
