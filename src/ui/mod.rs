pub mod style_dialog;
