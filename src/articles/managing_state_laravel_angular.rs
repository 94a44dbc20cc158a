//! "Managing State with Laravel and Angular: A Complete Guide".

use crate::article::Metadata;

pub fn metadata() -> Metadata {
    Metadata {
        id: "managing-state-laravel-angular".to_owned(),
        title: "Managing State with Laravel and Angular: A Complete Guide"
            .to_owned(),
        description: "Learn how to effectively manage state between Laravel \
                      backend and Angular frontend, including best practices \
                      for API design, data flow, and state management \
                      patterns."
            .to_owned(),
        thumbnail: "static/thumbnails/managing-state-laravel-angular.svg"
            .to_owned(),
        author: "Nauman Sadiq".to_owned(),
        date: "2024-01-15".to_owned(),
        read_time: "8 min read".to_owned(),
        tags: vec![
            "Laravel".to_owned(),
            "Angular".to_owned(),
            "Full Stack".to_owned(),
            "State Management".to_owned(),
            "API".to_owned(),
        ],
        category: "Full Stack Development".to_owned(),
    }
}

pub const BODY: &str = r##"When building modern web applications with Laravel and Angular, one of the most critical aspects to get right is state management. This comprehensive guide will walk you through the best practices for managing state between your Laravel backend and Angular frontend.

## Introduction

As a full-stack developer with over 4 years of experience working with Laravel and Angular, I've encountered numerous challenges in managing application state effectively. The key is to establish a clear data flow and maintain consistency between your backend API and frontend state.

## Laravel Backend: API Design Principles

### 1. RESTful API Structure

Start by designing your Laravel API following RESTful principles. This creates a predictable structure that your Angular frontend can easily consume.

```php
// routes/api.php
Route::apiResource('posts', PostController::class);
Route::apiResource('users', UserController::class);

// This creates routes like:
// GET /api/posts - List all posts
// POST /api/posts - Create a new post
// GET /api/posts/{post} - Get specific post
// PUT /api/posts/{post} - Update specific post
// DELETE /api/posts/{post} - Delete specific post
```

### 2. API Resources for Consistent Data Format

Use Laravel's API Resources to ensure consistent data formatting across your application.

```php
// app/Http/Resources/PostResource.php
<?php

namespace App\Http\Resources;

use Illuminate\Http\Resources\Json\JsonResource;

class PostResource extends JsonResource
{
    public function toArray($request)
    {
        return [
            'id' => $this->id,
            'title' => $this->title,
            'content' => $this->content,
            'author' => new UserResource($this->whenLoaded('author')),
            'created_at' => $this->created_at->toISOString(),
            'updated_at' => $this->updated_at->toISOString(),
        ];
    }
}
```

## Angular Frontend: State Management Strategies

### 1. Services for Data Management

Create Angular services that act as the single source of truth for your application data.

```typescript
// services/post.service.ts
import { Injectable } from '@angular/core';
import { HttpClient } from '@angular/common/http';
import { BehaviorSubject, Observable } from 'rxjs';
import { tap } from 'rxjs/operators';

@Injectable({
  providedIn: 'root'
})
export class PostService {
  private postsSubject = new BehaviorSubject<Post[]>([]);
  public posts$ = this.postsSubject.asObservable();

  constructor(private http: HttpClient) {}

  getPosts(): Observable<Post[]> {
    return this.http.get<Post[]>('/api/posts').pipe(
      tap(posts => this.postsSubject.next(posts))
    );
  }

  createPost(post: Partial<Post>): Observable<Post> {
    return this.http.post<Post>('/api/posts', post).pipe(
      tap(newPost => {
        const currentPosts = this.postsSubject.value;
        this.postsSubject.next([...currentPosts, newPost]);
      })
    );
  }
}
```

### 2. Reactive Programming with RxJS

Leverage RxJS for reactive state management that automatically updates your UI when data changes.

```typescript
// components/post-list.component.ts
import { Component, OnInit } from '@angular/core';
import { Observable } from 'rxjs';
import { PostService } from '../services/post.service';

@Component({
  selector: 'app-post-list',
  template: `
    <div *ngFor="let post of posts$ | async" class="post-card">
      <h3>{{ post.title }}</h3>
      <p>{{ post.content }}</p>
    </div>
  `
})
export class PostListComponent implements OnInit {
  posts$: Observable<Post[]>;

  constructor(private postService: PostService) {
    this.posts$ = this.postService.posts$;
  }

  ngOnInit() {
    this.postService.getPosts().subscribe();
  }
}
```

## Best Practices for State Synchronization

### 1. Optimistic Updates

Implement optimistic updates to improve user experience by updating the UI immediately while the API call is in progress.

### 2. Error Handling

Always implement proper error handling to revert optimistic updates when API calls fail.

### 3. Caching Strategy

Implement intelligent caching to reduce unnecessary API calls and improve performance.

## Conclusion

Effective state management between Laravel and Angular requires careful planning and consistent patterns. By following these practices, you'll build maintainable, scalable applications that provide excellent user experiences.

Remember, the key is to keep your state management simple and predictable. Start with basic patterns and gradually introduce more complex solutions as your application grows.
"##;
