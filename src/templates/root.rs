use crate::errors::ManifestError;
use crate::manifest;
use crate::options::Options;
use crate::plan::Plan;
use crate::project::Project;

pub fn plan(project: &Project, options: &Options, plan: &mut Plan) -> Result<(), ManifestError> {
    plan.file("README.md", readme(&project.name));
    plan.file(".gitignore", gitignore());
    plan.file("package.json", manifest::root_package(&project.name)?);

    if options.docker {
        plan.file("docker-compose.yml", docker_compose());
    }

    Ok(())
}

fn readme(project_name: &str) -> String {
    format!(
        r"# {project_name}

MERN Stack Application

## Setup

1. Install dependencies:
```bash
npm run install:all
```

2. Set up environment variables:
```bash
cp server/.env.example server/.env
```

3. Start MongoDB (choose one method):

**Method 1: Using system service**
```bash
# Ubuntu/Debian
sudo systemctl start mongod

# macOS with Homebrew
brew services start mongodb/brew/mongodb-community

# Windows
net start MongoDB
```

**Method 2: Using docker**
```bash
docker run -d -p 27017:27017 --name mongodb mongo:latest
```

**Method 3: Manual start**
```bash
sudo mongod --dbpath /var/lib/mongodb
```

4. Run the application:
```bash
npm run dev
```

## Scripts

- `npm run dev` - Start both client and server
- `npm run install:all` - Install all dependencies
- `npm run dev:client` - Start only client
- `npm run dev:server` - Start only server"
    )
}

fn gitignore() -> String {
    "node_modules/\n.env\n.env.local\n.DS_Store\ndist/\nbuild/\nlogs/\n*.log\nuploads/".to_string()
}

fn docker_compose() -> String {
    r#"version: '3.8'
services:
  mongodb:
    image: mongo:latest
    ports:
      - "27017:27017"
    environment:
      - MONGO_INITDB_DATABASE=mernapp
    volumes:
      - mongodb_data:/data/db

  server:
    build: ./server
    ports:
      - "5000:5000"
    environment:
      - NODE_ENV=development
      - MONGODB_URI=mongodb://mongodb:27017/mernapp
      - JWT_SECRET=your-jwt-secret
    depends_on:
      - mongodb

  client:
    build: ./client
    ports:
      - "3000:3000"
    depends_on:
      - server

volumes:
  mongodb_data:"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_title_is_the_project_name() {
        let content = readme("blog");

        assert!(content.starts_with("# blog\n"));
        assert!(content.contains("npm run install:all"));
    }
}
