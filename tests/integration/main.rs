mod helpers;
mod scenarios;
mod widget_lifecycle;
