use crate::app::App;

mod app;
mod components;
mod gateway;
mod helpers;
mod pages;
mod reveal;
mod routes;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
