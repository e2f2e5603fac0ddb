mod capture;
mod macros;
