mod hydrator;
mod logger;
mod session;
mod support;
