pub mod mock_lidarr;
