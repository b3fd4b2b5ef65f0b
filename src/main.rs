// RubricXpert Desktop - Tauri Application Entry Point
// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use rubricxpert_desktop::state::AppState;

use tauri::Manager;

fn main() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            // Initialization commands
            rubricxpert_desktop::commands::init::init_app,
            rubricxpert_desktop::commands::init::get_version,
            // Health commands
            rubricxpert_desktop::commands::health::get_health,
            // Settings commands
            rubricxpert_desktop::commands::settings::get_settings,
            rubricxpert_desktop::commands::settings::update_settings,
            // Upload/analysis commands
            rubricxpert_desktop::commands::analyze::select_essay_file,
            rubricxpert_desktop::commands::analyze::select_rubric_file,
            rubricxpert_desktop::commands::analyze::get_upload_state,
            rubricxpert_desktop::commands::analyze::get_analysis_progress,
            rubricxpert_desktop::commands::analyze::analyze_essay,
            // Results commands
            rubricxpert_desktop::commands::results::get_analysis_result,
            rubricxpert_desktop::commands::results::clear_analysis_result,
            // Chat commands
            rubricxpert_desktop::commands::chat::send_chat_message,
            rubricxpert_desktop::commands::chat::get_chat_history,
        ])
        .setup(|app| {
            #[cfg(debug_assertions)]
            {
                let window = app.get_webview_window("main").unwrap();
                window.open_devtools();
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
