fn main() {
    std::process::exit(pdf_chunk_paths_lib::run());
}
