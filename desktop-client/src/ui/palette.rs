use eframe::egui;

use crate::config::Theme;

pub struct Palette {
    pub board_background: egui::Color32,
    pub grid_line: egui::Color32,
    pub hover: egui::Color32,
    pub winner: egui::Color32,
    pub x_mark: egui::Color32,
    pub o_mark: egui::Color32,
    pub status_done: egui::Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Day => Self {
                board_background: egui::Color32::from_rgb(240, 240, 240),
                grid_line: egui::Color32::BLACK,
                hover: egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                winner: egui::Color32::from_rgb(255, 230, 120),
                x_mark: egui::Color32::from_rgb(220, 50, 50),
                o_mark: egui::Color32::from_rgb(50, 50, 220),
                status_done: egui::Color32::from_rgb(20, 140, 20),
            },
            Theme::Night => Self {
                board_background: egui::Color32::from_rgb(34, 36, 44),
                grid_line: egui::Color32::from_rgb(200, 200, 210),
                hover: egui::Color32::from_rgba_unmultiplied(120, 170, 255, 60),
                winner: egui::Color32::from_rgb(110, 90, 20),
                x_mark: egui::Color32::from_rgb(255, 110, 110),
                o_mark: egui::Color32::from_rgb(120, 160, 255),
                status_done: egui::Color32::from_rgb(120, 220, 120),
            },
        }
    }
}

pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Day => egui::Visuals::light(),
        Theme::Night => egui::Visuals::dark(),
    }
}
