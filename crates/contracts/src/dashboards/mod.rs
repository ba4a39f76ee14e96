pub mod d400_admin_overview;
