mod approximate_search;
mod load_from_file;
mod registration_loop;
